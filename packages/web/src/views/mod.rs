mod book_page;
pub use book_page::BookPage;

mod cart_page;
pub use cart_page::CartPage;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod orders;
pub use orders::Orders;

mod search;
pub use search::Search;

mod book_grid;
use book_grid::BookGrid;
