/// Callback port for whatever renders the machine to a human or a script.
///
/// The core pushes plain data through these methods; formatting and
/// localization stay on the implementor's side.
pub trait DisplayPort {
    /// Current unspent balance in minor currency units.
    fn balance(&mut self, amount: i64);

    /// One inventory entry, sold-out packs included.
    fn stock_line(&mut self, title: &str, count: u32, buyable: bool);

    /// One buyable pack in the consumer menu. `position` is 1-based.
    fn menu_line(&mut self, position: usize, description: &str, is_last: bool);

    /// One purchase record, in order.
    fn history_line(&mut self, seq: u32, description: &str);
}
