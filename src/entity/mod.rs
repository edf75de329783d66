pub mod accounts;
pub mod fabrics;

pub use accounts::Entity as Accounts;
pub use fabrics::Entity as Fabrics;
