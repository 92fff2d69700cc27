pub mod about;
pub mod app;
pub mod celebration;
pub mod contact;
pub mod courses;
pub mod education;
pub mod experience;
pub mod game_view;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;
