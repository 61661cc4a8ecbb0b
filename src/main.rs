use chrono::{Local, NaiveDate};
use clap::Parser;
use cozy::application::{
    init, ConfigService, ListTagsService, RecordMemoryService, RecordOptions, RemoveMemoryService,
    Removed, SearchOptions, SearchService, TagListOptions, TagMemoryService, TagRanking,
};
use cozy::cli::{format_memory_list, format_tag_list, Cli, Commands};
use cozy::domain::tags::Match;
use cozy::error::CozyError;
use cozy::infrastructure::logging::init_logging;
use cozy::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = init_logging(cli.verbose).and_then(|_| run(cli));

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, CozyError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CozyError::InvalidDate(value.to_string()))
}

fn parse_optional_date(value: Option<String>) -> Result<Option<NaiveDate>, CozyError> {
    value.as_deref().map(parse_date).transpose()
}

fn run(cli: Cli) -> Result<(), CozyError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Tags {
            most,
            least,
            counts,
            from,
            to,
        }) => {
            let ranking = match (most, least) {
                (Some(limit), _) => TagRanking::MostUsed(limit),
                (None, Some(limit)) => TagRanking::LeastUsed(limit),
                (None, None) => TagRanking::Alphabetical,
            };
            let options = TagListOptions {
                from: parse_optional_date(from)?,
                to: parse_optional_date(to)?,
                ranking,
            };

            let repo = FileSystemRepository::discover()?;
            let tags = ListTagsService::new(repo).execute(&options)?;
            print!("{}", format_tag_list(&tags, counts));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Search {
            query,
            tags,
            match_policy,
            from,
            to,
        }) => {
            let options = SearchOptions {
                tags,
                terms: Vec::new(),
                match_policy: match_policy.as_deref().map(str::parse::<Match>).transpose()?,
                from: parse_optional_date(from)?,
                to: parse_optional_date(to)?,
            }
            .with_query(&query.join(" "));

            let repo = FileSystemRepository::discover()?;
            let memories = SearchService::new(repo).execute(&options)?;
            print!("{}", format_memory_list(&memories));
            if memories.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Tag { date, tags }) => {
            let date = parse_date(&date)?;
            let repo = FileSystemRepository::discover()?;
            let memory = TagMemoryService::new(repo).execute(date, &tags)?;
            print!("{}", format_memory_list(std::slice::from_ref(&memory)));
            Ok(())
        }
        Some(Commands::Add {
            date,
            text,
            photo,
            graffiti,
            voice,
            tags,
        }) => {
            let date = match date {
                Some(value) => parse_date(&value)?,
                None => Local::now().date_naive(),
            };
            let options = RecordOptions {
                texts: text,
                photos: photo,
                graffiti,
                voices: voice,
                tags,
            };

            let repo = FileSystemRepository::discover()?;
            let memory = RecordMemoryService::new(repo).execute(date, &options)?;
            print!("{}", format_memory_list(std::slice::from_ref(&memory)));
            Ok(())
        }
        Some(Commands::Rm { date, chunk }) => {
            let date = parse_date(&date)?;
            let repo = FileSystemRepository::discover()?;
            match RemoveMemoryService::new(repo).execute(date, chunk)? {
                Removed::Chunk { chunk, memory } => {
                    println!(
                        "Removed {} chunk {} from {}",
                        chunk.kind(),
                        chunk.index(),
                        memory.date()
                    );
                }
                Removed::Memory(date) => println!("Deleted memory of {}", date),
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("default_match = {}", config.default_match);
                println!("tag_limit = {}", config.tag_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: cozy config [--list | <key> [<value>]]");
                println!("Valid keys: default_match, tag_limit, created");
                Ok(())
            }
        }
        None => {
            println!("cozy - Journal of daily memories");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
