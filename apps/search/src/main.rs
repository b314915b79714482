//! Catalog search command line.
//!
//! Prints the SQL a search would run, or runs it against the configured
//! database with `--execute`.
//!
//! Usage:
//!   catalog-search --entity candidate --caller caller.json --request filters.json --sort user.last_name

use anyhow::Context;
use catalog_query::{Direction, PageRequest, Specification};
use catalog_search::db::PostgresExecutor;
use catalog_search::models::{
    CandidateSearchRequest, JobSearchRequest, OpportunitySearchRequest, PartnerSearchRequest,
    ReferenceSearchRequest, SavedListSearchRequest, SavedSearchSearchRequest, UserSearchRequest,
};
use catalog_search::schema::reference::ReferenceTable;
use catalog_search::search::{
    CandidateSearch, JobSearch, OpportunitySearch, PartnerSearch, ReferenceSearch,
    SavedListSearch, SavedSearchSearch, SearchContext, UserSearch,
};
use catalog_search::services::explain;
use catalog_search::{logging, CallerContext, Config, SearchService};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use validator::Validate;

#[derive(Parser, Debug)]
#[clap(name = "catalog-search")]
#[clap(about = "Explain or run catalog searches")]
struct Args {
    /// Entity to search
    #[clap(short, long, value_enum)]
    entity: Entity,

    /// Caller context JSON file
    #[clap(short, long)]
    caller: PathBuf,

    /// Filter request JSON file; no filters when omitted
    #[clap(short, long)]
    request: Option<PathBuf>,

    /// Zero-based page index
    #[clap(long, default_value = "0")]
    page: u32,

    /// Page size (defaults to search.default_page_size)
    #[clap(long)]
    size: Option<u32>,

    /// Sort field, e.g. user.partner.name; repeat for more keys
    #[clap(long)]
    sort: Vec<String>,

    /// Sort descending
    #[clap(long)]
    desc: bool,

    /// Run against the configured database instead of printing SQL
    #[clap(long)]
    execute: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Entity {
    Candidate,
    Job,
    Opportunity,
    SavedSearch,
    SavedList,
    User,
    Partner,
    Country,
    Language,
    Occupation,
    EducationLevel,
    EducationMajor,
    SurveyType,
}

impl Entity {
    fn reference_table(self) -> Option<ReferenceTable> {
        match self {
            Self::Country => Some(ReferenceTable::Country),
            Self::Language => Some(ReferenceTable::Language),
            Self::Occupation => Some(ReferenceTable::Occupation),
            Self::EducationLevel => Some(ReferenceTable::EducationLevel),
            Self::EducationMajor => Some(ReferenceTable::EducationMajor),
            Self::SurveyType => Some(ReferenceTable::SurveyType),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load().context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let _logging_guard =
        logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        entity = ?args.entity,
        execute = args.execute,
        "Starting catalog search"
    );

    let caller: CallerContext = read_json(&args.caller)
        .with_context(|| format!("Failed to read caller from {}", args.caller.display()))?;

    let direction = if args.desc {
        Direction::Desc
    } else {
        Direction::Asc
    };
    let page = PageRequest::new(
        args.page,
        args.size.unwrap_or(config.search.default_page_size),
    )
    .sorted_by(args.sort.iter().cloned(), direction);

    let service = if args.execute {
        let executor = PostgresExecutor::connect(&config.database)
            .await
            .context("Failed to connect to the database")?;
        Some(SearchService::new(Arc::new(executor), config.search.clone()))
    } else {
        None
    };

    let context =
        SearchContext::today(&caller).with_english_language(config.search.english_language_id);
    let request = args.request.as_deref();
    let runner = Runner {
        service: service.as_ref(),
        page: &page,
    };

    match args.entity {
        Entity::Candidate => {
            let request: CandidateSearchRequest = read_request(request)?;
            runner.run(&CandidateSearch::new(&request, context)).await
        }
        Entity::Job => {
            let request: JobSearchRequest = read_request(request)?;
            runner.run(&JobSearch::new(&request, context)).await
        }
        Entity::Opportunity => {
            let request: OpportunitySearchRequest = read_request(request)?;
            runner.run(&OpportunitySearch::new(&request, context)).await
        }
        Entity::SavedSearch => {
            let request: SavedSearchSearchRequest = read_request(request)?;
            runner.run(&SavedSearchSearch::new(&request, context)).await
        }
        Entity::SavedList => {
            let request: SavedListSearchRequest = read_request(request)?;
            runner.run(&SavedListSearch::new(&request, context)).await
        }
        Entity::User => {
            let request: UserSearchRequest = read_request(request)?;
            runner.run(&UserSearch::new(&request, context)).await
        }
        Entity::Partner => {
            let request: PartnerSearchRequest = read_request(request)?;
            runner.run(&PartnerSearch::new(&request)).await
        }
        entity => {
            let table = entity
                .reference_table()
                .context("Unsupported entity")?;
            let request: ReferenceSearchRequest = read_request(request)?;
            runner
                .run(&ReferenceSearch::new(table, &request, context))
                .await
        }
    }
}

struct Runner<'a> {
    service: Option<&'a SearchService<PostgresExecutor>>,
    page: &'a PageRequest,
}

impl Runner<'_> {
    async fn run<S: Specification>(&self, spec: &S) -> anyhow::Result<()> {
        match self.service {
            Some(service) => {
                let result = service.search(spec, self.page).await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            None => {
                let (rows, count) = explain(spec, self.page)?;
                println!("-- rows\n{}\n-- binds: {:?}\n", rows.sql, rows.binds);
                println!("-- count\n{}\n-- binds: {:?}", count.sql, count.binds);
            }
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Reads and validates a filter request; a missing path means no filters.
fn read_request<T>(path: Option<&Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default + Validate,
{
    let request: T = match path {
        Some(path) => read_json(path)
            .with_context(|| format!("Failed to read request from {}", path.display()))?,
        None => T::default(),
    };
    request.validate()?;
    Ok(request)
}
