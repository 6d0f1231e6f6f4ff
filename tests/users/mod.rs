mod get_me;
mod register;
