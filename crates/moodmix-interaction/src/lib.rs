//! Model-backed adapters: the Gemini REST agent and the generator,
//! translator and period reporter built on top of any [`TextAgent`].

pub mod agent;
pub mod cocktail_generator;
pub mod cocktail_translator;
pub mod gemini_api_agent;
pub mod period_reporter;
pub mod prompts;

pub use agent::{AgentError, AgentRequest, TextAgent};
pub use cocktail_generator::AgentCocktailGenerator;
pub use cocktail_translator::AgentCocktailTranslator;
pub use gemini_api_agent::GeminiApiAgent;
pub use period_reporter::AgentPeriodReporter;
