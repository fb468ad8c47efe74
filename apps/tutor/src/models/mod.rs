pub mod example;
pub mod prompt;
pub mod reasoning;
