use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write figure: {0}")]
    Io(#[from] std::io::Error),

    #[error("figure has no panels to draw")]
    EmptyFigure,

    #[error("panel at row {row}, col {col} (span {row_span}x{col_span}) falls outside a {rows}x{cols} grid")]
    CellOutOfGrid {
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        rows: usize,
        cols: usize,
    },
}
