//! 簡單交期估算示例

use chrono::NaiveDate;
use eta_calc::EtaSimulator;
use eta_core::{Order, Phase, Product, ShiftTemplate, WorkCalendar};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 簡單交期估算示例 ===\n");

    // 週一到週五每天 8h 的班次日曆
    let calendar = WorkCalendar::new(ShiftTemplate::five_day(
        "標準白班".to_string(),
        Decimal::from(8),
    ));

    // 一張訂單：單一產品、單一工序 20h
    let order = Order::new(
        "ORD-001".to_string(),
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    )
    .with_products(vec![Product::new("P-100".to_string(), 5)
        .with_part_number("PN-4432".to_string())
        .with_phases(vec![Phase::new("CNC 加工".to_string(), Decimal::from(20))])]);

    let simulator = EtaSimulator::new(calendar);
    let result = simulator.simulate(&order)?;

    println!("訂單: {}", order.order_id);
    println!("剩餘工時: {}h", result.remaining_hours);
    println!("預計完工: {}", result.eta);
    println!("\n每日產能:");
    for (day, capacity) in &result.daily_capacity {
        println!("  {day}: {capacity}h");
    }

    Ok(())
}
