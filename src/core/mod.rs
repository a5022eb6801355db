pub mod guess;
pub mod score;
pub mod token;
pub mod vocabulary;

pub use guess::GuessOutcome;
pub use score::{ScoringMethod, SimilarityScore};
pub use token::Token;
pub use vocabulary::Vocabulary;
