//! 車間交期估算示例：設備分攤、併行工序、停電與週末加班

use chrono::NaiveDate;
use eta_cache::EtaCache;
use eta_calc::{EtaSimulator, ProgressCalculator, WorkloadCalculator};
use eta_core::{
    CapacityAdjustment, Equipment, Event, Order, ParallelGroup, Phase, Product,
    ShiftTemplate, WorkCalendar,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 車間交期估算示例 ===\n");

    let calendar = WorkCalendar::new(ShiftTemplate::five_day(
        "標準白班".to_string(),
        Decimal::from(8),
    ));

    // 設備快照：三台 CNC（一台檢修中）、一台陽極處理線
    let mut order = Order::new(
        "ORD-2024-031".to_string(),
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    )
    .with_due_date(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap())
    .with_customer_code("CUST-88".to_string())
    .with_equipment(vec![
        Equipment::new("CNC-1".to_string(), 1),
        Equipment::new("CNC-2".to_string(), 1),
        Equipment::new("CNC-3".to_string(), 1).with_available_count(0),
        Equipment::new("ANOD-1".to_string(), 1),
    ]);

    // 產品一：銑削 32h 分攤到三台 CNC（實際可用 2 台 → 16h），
    // 之後表面處理與雷射刻字併行
    order.add_product(
        Product::new("P-201".to_string(), 40)
            .with_part_number("PN-5501".to_string())
            .with_produced_qty(10)
            .with_phases(vec![
                Phase::new("銑削".to_string(), Decimal::from(32))
                    .with_equipment_list("CNC-1,CNC-2,CNC-3"),
                Phase::new("陽極處理".to_string(), Decimal::from(6))
                    .with_parallel_group(ParallelGroup::Concurrent(1))
                    .with_equipment_list("ANOD-1"),
                Phase::new("雷射刻字".to_string(), Decimal::from(4))
                    .with_parallel_group(ParallelGroup::Concurrent(1)),
            ]),
    );

    // 產品二：已完成一半的裝配
    order.add_product(
        Product::new("P-202".to_string(), 10)
            .with_part_number("PN-7210".to_string())
            .with_phases(vec![Phase::new("裝配".to_string(), Decimal::from(12))
                .with_completed_hours(Decimal::from(6))
                .with_assigned_employee("王技師".to_string())]),
    );

    // 週二停電半天；週六點名兩台 CNC 各加班 4h
    order.add_event(Event::new(
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        Decimal::from(4),
        "計劃停電".to_string(),
    ));
    order.add_adjustment(
        CapacityAdjustment::new(
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            Decimal::from(4),
            "週末趕工".to_string(),
        )
        .with_equipment_ids(vec!["CNC-1".to_string(), "CNC-2".to_string()]),
    );

    // 工作量與進度概況
    let equipment_map = order.equipment_available_map();
    println!("工作量概況:");
    for product in &order.products {
        let remaining =
            WorkloadCalculator::product_remaining_hours(product, &equipment_map);
        let progress = ProgressCalculator::product_progress(product, &equipment_map);
        let qty_progress = ProgressCalculator::product_quantity_progress(product);
        println!(
            "  {}: 剩餘 {}h，工時進度 {:.0}%，數量進度 {:.0}%",
            product.product_id,
            remaining.normalize(),
            progress * Decimal::from(100),
            qty_progress * Decimal::from(100),
        );
    }

    // 掛上結果快取：同一快照第二次查詢直接命中
    let simulator = EtaSimulator::new(calendar);
    let mut cache = EtaCache::new();
    let result = cache.get_or_compute(&simulator, &order)?;

    println!("\n預計完工: {}", result.eta);
    if let Some(due) = order.due_date {
        println!(
            "交期 {}：{}",
            due,
            if result.meets_due_date(due) {
                "可如期交付"
            } else {
                "有延誤風險"
            }
        );
    }

    println!("\n每日產能:");
    for (day, capacity) in &result.daily_capacity {
        println!("  {day}: {}h", capacity.normalize());
    }

    println!("\n說明:");
    for line in &result.explanation {
        println!("  {line}");
    }

    let again = cache.get_or_compute(&simulator, &order)?;
    println!("\n快取命中，ETA 不變: {}", again.eta);

    Ok(())
}
