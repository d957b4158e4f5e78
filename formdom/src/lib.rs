pub mod element;
pub mod outline;
pub mod view;

pub use element::{
    collect_focusable, find_by_data, find_by_data_mut, find_element, find_element_mut,
    update_by_data, Content, Element,
};
pub use outline::outline;
pub use view::View;
