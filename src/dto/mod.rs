/*!
 * Request and response shapes for the HTTP surface.
 *
 * Requests carry `validator` rules mirroring the column constraints;
 * responses are projected from entity models via `From` impls so the
 * mapping lives in exactly one place per entity.
 */

pub mod address;
pub mod category;
pub mod contact;
pub mod document;
pub mod rating;
pub mod supplier;

pub use address::*;
pub use category::*;
pub use contact::*;
pub use document::*;
pub use rating::*;
pub use supplier::*;
