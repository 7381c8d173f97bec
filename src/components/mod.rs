pub mod app;
pub mod auth_wall;
pub mod header;
pub mod login_screen;
pub mod media_card_list;
pub mod search_result_page;
pub mod season_list;

pub use app::App;
pub use auth_wall::{gate_view, AuthWall, GateView};
pub use header::Header;
pub use login_screen::LoginScreen;
pub use media_card_list::MediaCardList;
pub use search_result_page::SearchResultPage;
pub use season_list::{SeasonItem, SeasonList};
