use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum BolayError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("unrecognized page orientation {0:?}, expected one of p, portrait, l, landscape")]
    /// The orientation string was not one of the recognized spellings
    InvalidOrientation(String),

    #[error("unknown page format {0:?}")]
    /// The page format name is not in the format table
    UnknownPageFormat(String),

    #[error("could not parse colour {0:?}")]
    /// The colour string was neither a known colour name nor a hex triplet
    InvalidColour(String),

    #[error("font {0:?} has not been registered with the document")]
    /// The font key was never registered with the canvas
    UnknownFont(String),

    #[error("no font has been selected")]
    /// Text was measured or drawn before a font was selected
    NoFontSelected,

    #[error("drawing requires a page, but none has been added")]
    /// A drawing call was made before any page was added
    NoPage,
}
