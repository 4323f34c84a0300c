// Adapters layer: concrete implementations for the outside world (job board APIs, table output).

pub mod headhunter;
pub mod superjob;
pub mod table;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;
pub use table::AsciiTable;
