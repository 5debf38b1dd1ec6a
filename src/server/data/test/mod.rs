mod event;
mod letter;
mod level;
mod progress;
mod question;
mod user;
mod word;
