mod access_token;
mod console_url;

pub use access_token::AccessToken;
pub use console_url::ConsoleUrl;
