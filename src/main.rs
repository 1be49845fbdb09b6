use gloo::console::error;

fn main() {
    if let Err(e) = greeting_widget::mount() {
        error!(format!("greeting widget failed to mount: {e}"));
    }
}
