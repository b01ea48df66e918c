/// Case access grant entity module
pub mod case_access_grant;
/// Case message entity module
pub mod case_message;
/// Invitation record entity module
pub mod invitation;
/// Role type entity module
pub mod role_type;
/// Unit role grant entity module
pub mod unit_role_grant;

pub use case_access_grant::Entity as CaseAccessGrant;
pub use case_message::Entity as CaseMessage;
pub use invitation::Entity as Invitation;
pub use role_type::Entity as RoleType;
pub use unit_role_grant::Entity as UnitRoleGrant;
