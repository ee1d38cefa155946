pub mod agent_home;
pub mod analysis_panel;
pub mod chat_panel;
pub mod dashboard;
pub mod demo;
pub mod deploy;
pub mod landing;
pub mod review;
pub mod wizard;
