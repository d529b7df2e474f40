use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Сообщения для пользователя
pub const MSG_LOAD_FAILED: &str = "Error al cargar los registros";
pub const MSG_CATALOG_LOAD_FAILED: &str = "Error al cargar el catálogo de partes";
pub const MSG_INSERT_FAILED: &str = "Error al guardar el registro";
pub const MSG_VALIDATION_FAILED: &str = "Por favor complete todos los campos";
pub const MSG_INSERT_OK: &str = "Hallazgo registrado exitosamente";

/// Ошибки на границе сервисов и внешних коллабораторов
#[derive(Debug, Error)]
pub enum AppError {
    /// Не удалось загрузить записи
    #[error("Load failed: {0}")]
    Load(String),

    /// Не удалось загрузить каталог деталей (не фатально)
    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    /// Хранилище отклонило вставку
    #[error("Insert failed: {0}")]
    Insert(String),

    /// Не заполнены обязательные поля; до хранилища не доходит
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Load(_) | AppError::CatalogLoad(_) | AppError::Insert(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Текст уведомления для пользователя
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Load(_) => MSG_LOAD_FAILED,
            AppError::CatalogLoad(_) => MSG_CATALOG_LOAD_FAILED,
            AppError::Insert(_) => MSG_INSERT_FAILED,
            AppError::Validation(_) => MSG_VALIDATION_FAILED,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Load(d)
            | AppError::CatalogLoad(d)
            | AppError::Insert(d)
            | AppError::Validation(d) => d,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Server error");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Client error");
        }

        let body = ErrorBody {
            error: self.user_message(),
            detail: self.detail().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
