mod canvas;
mod font;
mod instance;
mod label;
mod layout;
mod placement;

#[doc(inline)]
pub use canvas::Canvas;
#[doc(inline)]
pub use font::DEFAULT_FONT_SIZE;
#[doc(inline)]
pub use font::FontRange;
#[doc(inline)]
pub use font::FontScale;
#[doc(inline)]
pub use instance::CloudInstance;
#[doc(inline)]
pub use label::Label;
#[doc(inline)]
pub use label::MeasuredLabel;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use layout::PLabelKey;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::Rotation;
