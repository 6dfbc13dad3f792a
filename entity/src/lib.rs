pub mod user;
pub mod organisation;
pub mod user_organisation;

/*
 Every user owns a personal organisation from the moment they register.
 Membership is many-to-many through user_organisation so a user can be
 added to other organisations later without touching the user row.
 */
