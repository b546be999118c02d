pub mod filter;
pub mod job_card;
pub mod layout;
pub mod loading;
pub mod search_bar;
pub mod tab_container;

pub use filter::Filter;
pub use job_card::JobCard;
pub use loading::Loading;
pub use search_bar::SearchBar;
pub use tab_container::TabContainer;
