pub mod top_nav;

pub use top_nav::TopNav;
