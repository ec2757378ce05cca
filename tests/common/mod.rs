pub mod corpus;
pub mod layout;
