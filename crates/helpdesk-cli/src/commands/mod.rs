//! Command implementations.

pub mod ask;
pub mod classify;
pub mod link;
pub mod resources;
pub mod show;
pub mod validate;

pub use self::ask::execute_ask;
pub use self::classify::execute_classify;
pub use self::link::execute_link;
pub use self::resources::execute_resources;
pub use self::show::execute_show;
pub use self::validate::execute_validate;
