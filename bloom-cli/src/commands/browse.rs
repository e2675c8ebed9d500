use bloom_gateway::contact::mailto;
use bloom_gateway::export::export_profile;
use bloom_gateway::filter::distinct_values;
use bloom_gateway::{
    Config, DirectoryStore, Message, Presenter, TextPresenter, ViewMode,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::{provide_store, AppError};

const HELP: &str = "\
type <value>       only profiles of this type (no value clears)
category <value>   only profiles in this category
interest <value>   only profiles with this interest
skill <value>      only profiles with this skill
search <text>      case-insensitive text search
reset              clear every filter
view grid|list     switch layout
show <id>          profile details
close              leave the detail view
export <id>        save a profile as JSON
contact <id>       print a mailto link
options            list the values each filter accepts
quit               leave";

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "browse", about = "Filter and inspect profiles interactively")]
pub struct Browse {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Category,
    Interest,
    Skill,
    Search,
}

/// One line typed in the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Filter(Field, String),
    Reset,
    View(ViewMode),
    Show(String),
    Close,
    Export(String),
    Contact(String),
    Options,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };
        let unknown = || AppError::UnknownInput(line.to_owned());
        let required = |argument: &str| {
            if argument.is_empty() {
                Err(unknown())
            } else {
                Ok(argument.to_owned())
            }
        };

        match command.to_lowercase().as_str() {
            "type" => Ok(Input::Filter(Field::Type, argument.to_owned())),
            "category" => {
                Ok(Input::Filter(Field::Category, argument.to_owned()))
            }
            "interest" => {
                Ok(Input::Filter(Field::Interest, argument.to_owned()))
            }
            "skill" => Ok(Input::Filter(Field::Skill, argument.to_owned())),
            "search" => Ok(Input::Filter(Field::Search, argument.to_owned())),
            "reset" => Ok(Input::Reset),
            "view" => argument
                .parse::<ViewMode>()
                .map(Input::View)
                .map_err(|_| unknown()),
            "show" => required(argument).map(Input::Show),
            "close" => Ok(Input::Close),
            "export" => required(argument).map(Input::Export),
            "contact" => required(argument).map(Input::Contact),
            "options" => Ok(Input::Options),
            "help" | "?" => Ok(Input::Help),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            _ => Err(unknown()),
        }
    }
}

/// Interactive state: one store, rendered after every change
pub struct Session<W: Write> {
    store: DirectoryStore,
    presenter: TextPresenter<W>,
    export_dir: PathBuf,
}

impl<W: Write> Session<W> {
    pub fn new(store: DirectoryStore, out: W, export_dir: PathBuf) -> Self {
        Self {
            store,
            presenter: TextPresenter::new(out),
            export_dir,
        }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.presenter.into_inner()
    }

    pub fn render(&mut self) -> Result<(), AppError> {
        self.presenter.present(&self.store)?;
        Ok(())
    }

    /// Handle one input. Returns false once the session should end.
    ///
    /// A failed action is printed and the session goes on; only failing
    /// to write the output is returned.
    pub fn handle(&mut self, input: Input) -> Result<bool, AppError> {
        match self.act(input) {
            Err(AppError::IoError(e)) => Err(AppError::IoError(e)),
            Err(e) => {
                log::warn!("browse action failed: {}", e);
                writeln!(self.presenter.get_mut(), "{}", e)?;
                Ok(true)
            }
            outcome => outcome,
        }
    }

    fn act(&mut self, input: Input) -> Result<bool, AppError> {
        match input {
            Input::Filter(field, value) => {
                let criteria = self.store.criteria().clone();
                let criteria = match field {
                    Field::Type => criteria.with_type(value),
                    Field::Category => criteria.with_category(value),
                    Field::Interest => criteria.with_interest(value),
                    Field::Skill => criteria.with_skill(value),
                    Field::Search => criteria.with_search(value),
                };
                self.store.update(Message::CriteriaChanged(criteria));
                self.render()?;
            }
            Input::Reset => {
                self.store.update(Message::Reset);
                self.render()?;
            }
            Input::View(view) => {
                self.store.update(Message::ViewChanged(view));
                self.render()?;
            }
            Input::Show(id) => {
                self.store.update(Message::Selected(id.clone()));
                match self.store.selected() {
                    Some(profile) => self.presenter.present_detail(profile)?,
                    None => self.not_found(&id)?,
                }
            }
            Input::Close => {
                self.store.update(Message::Deselected);
                self.render()?;
            }
            Input::Export(id) => match self.store.select(&id) {
                Some(profile) => {
                    let path = export_profile(profile, &self.export_dir)
                        .map_err(|e| AppError::ExportError(e.to_string()))?;
                    writeln!(
                        self.presenter.get_mut(),
                        "Profile saved to {}",
                        path.display()
                    )?;
                }
                None => self.not_found(&id)?,
            },
            Input::Contact(id) => match self.store.select(&id) {
                Some(profile) => {
                    let url = mailto(profile)?;
                    writeln!(self.presenter.get_mut(), "{}", url)?;
                }
                None => self.not_found(&id)?,
            },
            Input::Options => {
                let options = distinct_values(self.store.full());
                let out = self.presenter.get_mut();
                writeln!(out, "Types:      {}", options.types.join(", "))?;
                writeln!(out, "Categories: {}", options.categories.join(", "))?;
                writeln!(out, "Interests:  {}", options.interests.join(", "))?;
                writeln!(out, "Skills:     {}", options.skills.join(", "))?;
            }
            Input::Help => writeln!(self.presenter.get_mut(), "{}", HELP)?,
            Input::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Feed lines until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        self.render()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Input>() {
                Ok(input) => {
                    if !self.handle(input)? {
                        break;
                    }
                }
                Err(e) => {
                    writeln!(self.presenter.get_mut(), "{}, try 'help'", e)?
                }
            }
        }
        Ok(())
    }

    fn not_found(&mut self, id: &str) -> Result<(), AppError> {
        let error = AppError::ProfileNotFound(id.to_owned());
        writeln!(self.presenter.get_mut(), "{}", error)?;
        Ok(())
    }
}

impl Browse {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let store = provide_store(config).await;
        let mut session = Session::new(
            store,
            std::io::stdout(),
            config.export_dir.clone(),
        );
        session.run(std::io::stdin().lock())
    }
}
