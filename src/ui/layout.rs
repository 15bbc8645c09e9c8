use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct HomeLayout {
    pub header_area: Rect,
    pub start_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct CreateLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    /// Option inputs in display order: top-left, top-right, bottom-left, bottom-right.
    pub option_areas: [Rect; 4],
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub progress_area: Rect,
    pub counter_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct ResultsLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub gauge_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_home_chunks(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    HomeLayout {
        header_area: chunks[0],
        start_area: chunks[1],
        list_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_create_chunks(area: Rect) -> CreateLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let top = halves(chunks[2]);
    let bottom = halves(chunks[3]);

    CreateLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        option_areas: [top[0], top[1], bottom[0], bottom[1]],
        list_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(chunks[0]);

    QuizLayout {
        progress_area: header[0],
        counter_area: header[1],
        question_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_results_chunks(area: Rect) -> ResultsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    ResultsLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        gauge_area: chunks[2],
        help_area: chunks[3],
    }
}
