mod auth;
mod catalog;
mod collection;
mod compare;

pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs, AuthResetArgs};
pub use catalog::{CatalogCommands, CatalogImportArgs};
pub use collection::{
    CollectionCommands, CollectionCreateArgs, CollectionIdArgs, CollectionItemArgs,
    CollectionUpdateArgs,
};
pub use compare::{CompareCommands, CompareCreateArgs, CompareIdArgs};
