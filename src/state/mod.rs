/// State management module
///
/// This module handles all application state, including:
/// - Phone records shared by every view (data.rs)
/// - Filter configuration for the phone list (filters.rs)
/// - The bounded compare set (compare.rs)
/// - Navigation, selection and compare snapshots (session.rs)

pub mod data;
pub mod filters;
pub mod compare;
pub mod session;
