pub(crate) mod range_slider;
mod text_input;
mod todo_list_input;

pub(crate) use range_slider::RangeSlider;
pub(crate) use text_input::TextInput;
pub(crate) use todo_list_input::ToDoListInput;
