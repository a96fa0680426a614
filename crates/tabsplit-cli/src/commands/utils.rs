use tabsplit_core::receipt::ReceiptLedger;

/// Prints a decoded ledger as an editable-looking table.
pub fn print_ledger(ledger: &ReceiptLedger) {
    println!("{:<4} {:<24} {:>8} {:>10}", "#", "Name", "Qty", "Price");
    for (index, item) in ledger.items.iter().enumerate() {
        let quantity = item
            .quantity
            .map(|q| format!("{:.1}", q))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<4} {:<24} {:>8} {:>10.2}",
            index, item.name, quantity, item.total_price
        );
    }
    println!();
    println!("Subtotal:    {:>10.2}", ledger.subtotal);
    println!("Tax:         {:>10.2}", ledger.tax);
    println!("Total:       {:>10.2}", ledger.total);
    println!("Tip:         {:>10.2}", ledger.tip);
    println!("Final total: {:>10.2}", ledger.final_total());

    if !ledger.is_valid() {
        println!();
        println!("warning: ledger has a zero subtotal, tax, or total; fix it before splitting");
    }
}
