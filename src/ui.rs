#![cfg(feature = "std")]

//! Console presentation: message catalog, board and results rendering.

use std::string::String;

use crate::board::Board;
use crate::command::InvalidInput;
use crate::common::ShotOutcome;

/// Language of the messages shown to the player.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Every kind of line the game prints, apart from the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Prompt,
    AlreadyShot,
    Hit,
    Miss,
    BadFormat,
    OutOfBounds,
    TimeoutLoss,
    Victory,
    Farewell,
    ResultsHeader,
    ShotsFired,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Message::Prompt => "Fire at: ",
                Message::AlreadyShot => "You already fired at that cell!",
                Message::Hit => "Hit!",
                Message::Miss => "Miss!",
                Message::BadFormat => "Invalid input. Enter a cell such as 'A2' or 'D5'.",
                Message::OutOfBounds => "Invalid coordinates. Enter a cell such as 'A2' or 'D5'.",
                Message::TimeoutLoss => "Too slow! You lose.",
                Message::Victory => "All ships destroyed!",
                Message::Farewell => "Game over.",
                Message::ResultsHeader => "Results:",
                Message::ShotsFired => "Shots fired: ",
            },
            Locale::Ru => match self {
                Message::Prompt => "Куда стреляем: ",
                Message::AlreadyShot => "Уже стреляли в эту ячейку!",
                Message::Hit => "Попадание!",
                Message::Miss => "Мимо!",
                Message::BadFormat => {
                    "Неверный формат ввода. Введите ячейку в формате 'A2', 'D5' и т.д."
                }
                Message::OutOfBounds => {
                    "Неверные координаты. Введите ячейку в формате 'A2', 'D5' и т.д."
                }
                Message::TimeoutLoss => "Слишком долго! Вы проиграли.",
                Message::Victory => "Все корабли уничтожены!",
                Message::Farewell => "Игра завершена.",
                Message::ResultsHeader => "Результаты игры:",
                Message::ShotsFired => "Количество выстрелов: ",
            },
        }
    }
}

impl From<ShotOutcome> for Message {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::AlreadyShot => Message::AlreadyShot,
            ShotOutcome::Hit => Message::Hit,
            ShotOutcome::Miss => Message::Miss,
        }
    }
}

impl From<InvalidInput> for Message {
    fn from(reason: InvalidInput) -> Self {
        match reason {
            InvalidInput::BadFormat => Message::BadFormat,
            InvalidInput::OutOfBounds => Message::OutOfBounds,
        }
    }
}

/// Board as printed between turns.
pub fn render_board(board: &Board) -> String {
    board.to_string()
}

/// Results summary: a header line and the shot count.
pub fn render_results(shots: u32, locale: Locale) -> String {
    std::format!(
        "{}\n{}{}\n",
        Message::ResultsHeader.text(locale),
        Message::ShotsFired.text(locale),
        shots
    )
}
