mod generate;
mod helpers;
mod messages;
