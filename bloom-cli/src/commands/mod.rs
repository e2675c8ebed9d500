use bloom_gateway::FilterCriteria;
use clap::Subcommand;

pub mod browse;
mod contact;
mod export;
mod list;
mod show;
mod stats;

#[derive(Debug, Subcommand)]
pub enum Commands {
    List(list::List),
    Show(show::Show),
    Export(export::Export),
    Contact(contact::Contact),
    Stats(stats::Stats),
    Browse(browse::Browse),
}

/// Filter options shared by the commands that show a filtered list
#[derive(Clone, Debug, Default, clap::Args)]
pub struct FilterArgs {
    #[clap(long = "type", help = "Only profiles of this type")]
    kind: Option<String>,
    #[clap(long, help = "Only profiles in this category")]
    category: Option<String>,
    #[clap(long, help = "Only profiles with this interest")]
    interest: Option<String>,
    #[clap(long, help = "Only profiles with this skill")]
    skill: Option<String>,
    #[clap(long, help = "Case-insensitive text search")]
    search: Option<String>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(
            self.kind.clone(),
            self.category.clone(),
            self.interest.clone(),
            self.skill.clone(),
            self.search.clone(),
        )
    }
}
