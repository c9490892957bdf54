//! Platform-independent interaction logic for the Mundus site.
//!
//! Everything here runs on the host with synthetic timestamps; the web crate
//! supplies the event sources and rendering surfaces.

pub mod assets;
pub mod consent;
pub mod constants;
pub mod contact;
pub mod deck;
pub mod scroll;
pub mod spline;
pub mod spring;
pub mod stroke;
pub mod trail;

pub use consent::ConsentLatch;
pub use deck::ImageDeck;
pub use scroll::{FxFrame, ScrollFx};
pub use spline::{Stamp, StampBatch};
pub use stroke::{StrokeConfig, StrokeEngine, StrokePoint};
pub use trail::{
    ContainerBounds, SpawnRequest, SpriteHandle, StaticFallback, TrailConfig, TrailSpawner,
    TrailSurface,
};
