use axum::http::StatusCode;
use thiserror::Error;

/// Why a submission was rejected. No state changes when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no category selected")]
    MissingCategory,
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("title is empty")]
    EmptyTitle,
    #[error("points are missing")]
    MissingPoints,
    #[error("points '{0}' are not an integer")]
    InvalidPoints(String),
    #[error("points {0} would overflow the running total")]
    PointsOutOfRange(i64),
}

impl ValidationError {
    /// Text shown to the user in the error toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidPoints(_) => "Баллы должны быть целым числом",
            Self::PointsOutOfRange(_) => "Слишком большое количество баллов",
            Self::UnknownCategory(_) => "Неизвестная категория",
            Self::MissingCategory | Self::EmptyTitle | Self::MissingPoints => "Заполните все поля",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable(err.user_message())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
