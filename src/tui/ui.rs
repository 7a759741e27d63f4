use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::Tab;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{FilterPanel, PostsPanel, TitleBar, UserPanel};

const HELP_TEXT: &str = " Tab/Shift+Tab switch panel • Enter submit • Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.tab, app.status()).render(frame, title_area);

    match app.tab {
        Tab::Users => {
            UserPanel::new(&mut tui.user_panel, app.user.state()).render(frame, main_area)
        }
        Tab::Posts => {
            PostsPanel::new(&mut tui.posts_panel, app.posts.state()).render(frame, main_area)
        }
        Tab::Filter => {
            FilterPanel::new(&mut tui.filter_panel, &app.filter).render(frame, main_area)
        }
    }

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::perform;
    use crate::core::action::{Action, update};
    use crate::core::input::UserQuery;
    use crate::test_support::{StubApi, sample_posts, sample_user, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &mut App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    async fn dispatch(app: &mut App, api: &StubApi, action: Action) {
        let effect = update(app, action);
        if let Some(completion) = perform(api, effect).await {
            update(app, completion);
        }
    }

    #[test]
    fn test_draw_ui_initial() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let text = screen(&mut app, &mut tui);
        assert!(text.contains("ActionDeck"));
        assert!(text.contains("Enter User ID (1-10):"));
        assert!(text.contains("Ready"));
    }

    #[tokio::test]
    async fn test_user_id_one_renders_leanne_graham() {
        let api = StubApi::default().with_user(Ok(sample_user(1)));
        let mut app = test_app();
        let mut tui = TuiState::new();

        dispatch(&mut app, &api, Action::SubmitUser(UserQuery::new("1"))).await;

        let text = screen(&mut app, &mut tui);
        assert!(text.contains("Leanne Graham"));
        assert!(text.contains("Last action: user"));
    }

    #[tokio::test]
    async fn test_empty_id_renders_validation_error() {
        let api = StubApi::default();
        let mut app = test_app();
        let mut tui = TuiState::new();

        dispatch(&mut app, &api, Action::SubmitUser(UserQuery::new(""))).await;

        let text = screen(&mut app, &mut tui);
        assert!(text.contains("Please enter a valid user ID"));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_posts_panel_renders_fetched_posts() {
        let api = StubApi::default().with_posts(Ok(sample_posts(5)));
        let mut app = test_app();
        app.tab = Tab::Posts;
        let mut tui = TuiState::new();

        let query = app.posts_query();
        dispatch(&mut app, &api, Action::RequestPosts(query)).await;

        let text = screen(&mut app, &mut tui);
        assert_eq!(app.posts.state().result.as_ref().map(Vec::len), Some(3));
        assert!(text.contains("Post title 1"));
        assert!(text.contains("Last action: posts"));
    }

    #[test]
    fn test_filter_panel_renders_matches() {
        let mut app = test_app();
        app.tab = Tab::Filter;
        update(&mut app, Action::SearchChanged("Da".to_string()));
        let mut tui = TuiState::new();
        let text = screen(&mut app, &mut tui);
        assert!(text.contains("David"));
        assert!(!text.contains("Alice"));
        assert!(text.contains("1 of 4 shown"));
    }
}
