pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod metric;
pub mod router;
pub mod trace;
pub mod util;
