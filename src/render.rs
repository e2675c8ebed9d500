//! Text rendering of the directory.
//!
//! [Presenter] is the boundary between the store and whatever shows
//! it; [TextPresenter] writes plain text to any [Write].

use std::io::Write;

use crate::profile::Profile;
use crate::score::score;
use crate::store::{DirectoryStore, DisplayState, Stats, ViewMode};
use crate::Result;

/// Number of interests and skills shown on a card
const CARD_TAGS: usize = 2;

pub trait Presenter {
    /// Render stats and the body matching the store's display state
    fn present(&mut self, store: &DirectoryStore) -> Result<()>;

    fn present_detail(&mut self, profile: &Profile) -> Result<()>;
}

pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writer for output that is not part of the directory itself
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    fn stats(&mut self, stats: Stats) -> Result<()> {
        writeln!(
            self.out,
            "Total: {}  Shown: {}  Matched: {}",
            stats.total, stats.shown, stats.high_match
        )?;
        Ok(())
    }

    fn card(&mut self, profile: &Profile) -> Result<()> {
        writeln!(
            self.out,
            "[{}] {}  {}%",
            profile.id,
            profile.name,
            score(profile)
        )?;
        writeln!(self.out, "    {}", profile.subtitle())?;

        let mut tags = vec![format!("#{}", profile.category)];
        tags.extend(profile.interests.iter().take(CARD_TAGS).cloned());
        tags.extend(
            profile
                .skills
                .iter()
                .take(CARD_TAGS)
                .map(|skill| format!("+{}", skill)),
        );
        writeln!(self.out, "    {}", tags.join("  "))?;

        for (platform, url) in profile.sns.known() {
            writeln!(self.out, "    {}: {}", platform.label(), url)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn row(&mut self, profile: &Profile) -> Result<()> {
        writeln!(
            self.out,
            "{:>3}% [{}] {} | {} | {}",
            score(profile),
            profile.id,
            profile.name,
            profile.subtitle(),
            profile.category
        )?;
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, store: &DirectoryStore) -> Result<()> {
        match store.display_state() {
            DisplayState::Loading => {
                writeln!(self.out, "Loading profiles...")?;
            }
            DisplayState::Error(message) => {
                writeln!(self.out, "Failed to load data: {}", message)?;
            }
            DisplayState::NoResults => {
                self.stats(store.stats())?;
                writeln!(self.out, "No profiles match the current filters.")?;
            }
            DisplayState::Results => {
                self.stats(store.stats())?;
                writeln!(self.out)?;
                for profile in store.current_filtered() {
                    match store.view() {
                        ViewMode::Grid => self.card(profile)?,
                        ViewMode::List => self.row(profile)?,
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn present_detail(&mut self, profile: &Profile) -> Result<()> {
        let out = &mut self.out;
        writeln!(out, "{}", profile.name)?;
        writeln!(out, "{}", profile.subtitle())?;
        writeln!(out, "[{}]  Match: {}%", profile.category, score(profile))?;

        writeln!(out, "\nContact")?;
        writeln!(out, "  Email: {}", profile.email)?;
        writeln!(out, "  Phone: {}", profile.phone)?;

        writeln!(out, "\nInterests")?;
        writeln!(out, "  {}", profile.interests.join(", "))?;

        writeln!(out, "\nSkills")?;
        writeln!(out, "  {}", profile.skills.join(", "))?;

        writeln!(out, "\nSNS")?;
        for (platform, url) in profile.sns.known() {
            writeln!(out, "  {}: {}", platform.label(), url)?;
        }

        writeln!(out, "\nAbout")?;
        writeln!(out, "  {}", profile.bio)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;
    use crate::store::Message;
    use serde_json::json;

    fn profiles() -> Vec<Profile> {
        vec![
            json!({
                "id": 1,
                "name": "Aoi",
                "type": "学生",
                "category": "Tech",
                "university": "Tokyo Institute",
                "grade": "B3",
                "email": "aoi@example.com",
                "phone": "090",
                "bio": "I like robots",
                "interests": ["AI", "Design", "Music"],
                "skills": ["Python", "Figma", "Excel"],
                "sns": {"instagram": "https://instagram.com/aoi", "tiktok": "", "twitter": "https://x.com/aoi"}
            }),
            json!({
                "id": 2,
                "name": "Ren",
                "type": "professional",
                "category": "Sales",
                "company": "Osaka Ads",
                "experience": "5 years",
                "interests": [],
                "skills": []
            }),
        ]
        .into_iter()
        .map(|value| Profile::from_value(value).unwrap())
        .collect()
    }

    fn render(store: &DirectoryStore) -> String {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.present(store).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn loading_and_error_states() {
        let mut store = DirectoryStore::new();
        assert_eq!(render(&store), "Loading profiles...\n");

        store.update(Message::LoadFailed("connection refused".to_owned()));
        assert_eq!(render(&store), "Failed to load data: connection refused\n");
    }

    #[test]
    fn grid_cards() {
        let mut store = DirectoryStore::new();
        store.load(profiles());

        let output = render(&store);
        assert!(output.starts_with("Total: 2  Shown: 2  Matched: 1\n"));
        assert!(output.contains("[1] Aoi  99%\n    Tokyo Institute / B3\n"));
        assert!(output.contains("    #Tech  AI  Design  +Python  +Figma\n"));
        assert!(!output.contains("Music"));
        assert!(output.contains("    Instagram: https://instagram.com/aoi\n"));
        assert!(output.contains("    X: https://x.com/aoi\n"));
        assert!(!output.contains("TikTok"));
        assert!(output.contains("[2] Ren  50%\n    Osaka Ads / 5 years\n"));
    }

    #[test]
    fn list_rows() {
        let mut store = DirectoryStore::new().with_view(ViewMode::List);
        store.load(profiles());

        let output = render(&store);
        assert!(output.contains(" 99% [1] Aoi | Tokyo Institute / B3 | Tech\n"));
        assert!(output.contains(" 50% [2] Ren | Osaka Ads / 5 years | Sales\n"));
    }

    #[test]
    fn no_results_message() {
        let mut store = DirectoryStore::new();
        store.load(profiles());
        store.apply(FilterCriteria::new().with_category("Legal"));

        assert_eq!(
            render(&store),
            "Total: 2  Shown: 0  Matched: 0\nNo profiles match the current filters.\n"
        );
    }

    #[test]
    fn detail_view() {
        let profile = &profiles()[0];
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.present_detail(profile).unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(output.starts_with("Aoi\nTokyo Institute / B3\n[Tech]  Match: 99%\n"));
        assert!(output.contains("  Email: aoi@example.com\n  Phone: 090\n"));
        assert!(output.contains("Interests\n  AI, Design, Music\n"));
        assert!(output.contains("Skills\n  Python, Figma, Excel\n"));
        assert!(output.contains("SNS\n  Instagram: https://instagram.com/aoi\n  X: https://x.com/aoi\n"));
        assert!(output.ends_with("About\n  I like robots\n"));
    }
}
