use thiserror::Error;
#[derive(Debug, Error)]
pub enum EarthingError {
    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render chart: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for EarthingError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        EarthingError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for EarthingError {
    fn from(value: image::ImageError) -> Self {
        EarthingError::Plot(value.to_string())
    }
}
