pub mod apply;
pub mod codes;
pub mod dispatch;
pub mod lookup;
pub mod schema;
pub mod style;
