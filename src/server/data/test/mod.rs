mod admin_user;
mod announcement;
mod document;
mod donation;
mod member;
