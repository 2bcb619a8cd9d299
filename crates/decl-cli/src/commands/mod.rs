pub mod create_project;
pub mod dispatch;
pub mod get_all;
pub mod get_file;
pub mod schema;
mod shared;
pub mod update_file;

#[cfg(test)]
mod test_support;
