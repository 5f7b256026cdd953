/// User-facing confirmation and notification, injected into the page.
pub trait Prompter {
    /// Ask a yes/no question. `false` means the user declined.
    fn confirm(&mut self, message: &str) -> bool;

    /// Tell the user an action completed.
    fn notify(&mut self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}
