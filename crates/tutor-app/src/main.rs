mod cli;
mod env;
mod repl;

use std::process::ExitCode;

use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_agents::{
    AgentError, AgentSettings, ConversationAgent, ScenarioAgent, ScenarioRegistry, SessionId,
    SessionStore, VocabAgent,
};
use tutor_ai::ModelRegistry;
use tutor_common::TutorError;
use tutor_config::TutorConfig;

use cli::{Args, Command};
use repl::Target;

const DEFAULT_DIRECTIVE: &str = "tutor=info";

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive.parse().or_else(|_| DEFAULT_DIRECTIVE.parse()) {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("tutor: ignoring log directive {directive:?}: {e}"),
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build each configured scenario, skipping the ones that fail.
fn load_scenarios(
    keys: &[String],
    settings: &AgentSettings,
    models: &ModelRegistry,
    store: &SessionStore,
) -> (ScenarioRegistry, Vec<(String, AgentError)>) {
    let mut registry = ScenarioRegistry::new();
    let mut skipped = Vec::new();
    for key in keys {
        match ScenarioAgent::new(key, settings, models, store.clone(), None) {
            Ok(agent) => registry.register(agent),
            Err(e) => {
                warn!("Skipping scenario {key}: {e}");
                skipped.push((key.clone(), e));
            }
        }
    }
    info!("Loaded {} of {} scenarios", registry.len(), keys.len());
    (registry, skipped)
}

async fn run(args: Args, config: TutorConfig) -> Result<(), TutorError> {
    let mut settings = AgentSettings::from_config(&config);
    if let Some(model) = args.model {
        settings = settings.with_model(model);
    }
    let models = config.models.registry();
    let store = SessionStore::new();
    let session_id = args.session.map(SessionId::from);

    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    match args.command {
        Command::Config => {
            println!("{}", tutor_config::config_to_json(&config));
            Ok(())
        }
        Command::Scenarios => {
            let (registry, skipped) =
                load_scenarios(&config.scenarios.keys, &settings, &models, &store);
            for key in registry.keys() {
                println!("{key}");
            }
            for (key, e) in skipped {
                println!("{key} (unavailable: {e})");
            }
            Ok(())
        }
        Command::Conversation => {
            let mut agent = ConversationAgent::new(&settings, &models, store, session_id)
                .map_err(TutorError::agent)?;
            repl::run(Target::Chat(&mut agent), input, &mut out).await
        }
        Command::Scenario { key } => {
            if session_id.is_some() {
                warn!("--session is ignored for scenarios; sessions are keyed by scenario");
            }
            let (mut registry, _) =
                load_scenarios(&config.scenarios.keys, &settings, &models, &store);
            let agent = registry.get_mut(&key).map_err(TutorError::agent)?;
            repl::run(Target::Chat(agent), input, &mut out).await
        }
        Command::Vocab => {
            let mut agent =
                VocabAgent::new(&settings, &models, store, session_id).map_err(TutorError::agent)?;
            repl::run(Target::Vocab(&mut agent), input, &mut out).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env::load_dotenv();
    let args = cli::parse();

    let loaded = tutor_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive(),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    info!("Tutor v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        warn!("Config load failed, using defaults: {e}");
        TutorConfig::default()
    });
    info!("Config loaded (model: {})", config.models.default);

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("tutor: {e}");
            ExitCode::FAILURE
        }
    }
}
