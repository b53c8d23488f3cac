mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod habit_board;
pub use habit_board::HabitBoard;

mod notice;
pub use notice::NoticeBanner;
