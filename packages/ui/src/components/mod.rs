//! Small form and layout primitives shared by every view.
//!
//! Styling lives in `assets/ui.css`; each component only carries its
//! semantic class and whatever the caller appends via `class`.

mod badge;
mod button;
mod card;
mod input;
mod label;
mod modal_overlay;
mod switch;
mod tabs;
mod textarea;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::Input;
pub use label::Label;
pub use modal_overlay::ModalOverlay;
pub use switch::Switch;
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
pub use textarea::Textarea;
