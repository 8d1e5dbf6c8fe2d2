//! 集成測試

use chrono::{NaiveDate, NaiveDateTime};
use eta_calc::{EtaSimulator, ProgressCalculator, WorkloadCalculator};
use eta_core::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

fn monday_start() -> NaiveDateTime {
    // 2024-01-01 是週一
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn weekday_calendar() -> WorkCalendar {
    // 週一到週五 8h，週末休息
    WorkCalendar::new(ShiftTemplate::five_day("標準".to_string(), Decimal::from(8)))
}

#[test]
fn test_single_phase_order_eta() {
    // 場景：單一依序工序 20h，無設備約束、無事件
    //   週一 8h → 週二 8h → 週三消耗剩餘 4h
    //   完工 = 週三 09:00 + 4h = 13:00

    let order = Order::new("ORD-001".to_string(), monday_start()).with_products(vec![
        Product::new("P-1".to_string(), 1).with_phases(vec![Phase::new(
            "加工".to_string(),
            Decimal::from(20),
        )]),
    ]);

    let simulator = EtaSimulator::new(weekday_calendar());
    let result = simulator.simulate(&order).unwrap();

    println!("ETA: {}", result.eta);
    for line in &result.explanation {
        println!("  {line}");
    }

    assert_eq!(
        result.eta,
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap()
    );
    assert_eq!(result.remaining_hours, Decimal::from(20));

    // 產能紀錄只含消耗到的排班日
    assert_eq!(result.daily_capacity.len(), 3);
    assert_eq!(
        result
            .daily_capacity
            .get(&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        Some(&Decimal::from(8))
    );
}

#[test]
fn test_lost_day_pushes_eta_back() {
    // 場景：同上，但週二整日停電損失 8h
    //   週二淨產能 0，完工順延到週四 13:00

    let mut order = Order::new("ORD-002".to_string(), monday_start()).with_products(vec![
        Product::new("P-1".to_string(), 1).with_phases(vec![Phase::new(
            "加工".to_string(),
            Decimal::from(20),
        )]),
    ]);
    order.add_event(Event::new(
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        Decimal::from(8),
        "停電".to_string(),
    ));

    let result = EtaSimulator::new(weekday_calendar())
        .simulate(&order)
        .unwrap();

    assert_eq!(
        result.eta,
        NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap()
    );

    // 停電日仍入紀錄（淨產能 0）並附原因
    assert_eq!(
        result
            .daily_capacity
            .get(&NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
        Some(&Decimal::ZERO)
    );
    assert!(result
        .explanation
        .iter()
        .any(|line| line.contains("停電(-8h)")));
}

#[test]
fn test_completed_order_eta_equals_start() {
    // 全部工序完工的訂單不做逐日模擬，ETA 即開工時間
    let order = Order::new("ORD-003".to_string(), monday_start()).with_products(vec![
        Product::new("P-1".to_string(), 2).with_phases(vec![
            Phase::new("車削".to_string(), Decimal::from(8))
                .with_completed_hours(Decimal::from(8)),
            Phase::new("檢驗".to_string(), Decimal::from(2))
                .with_completed_hours(Decimal::from(2)),
        ]),
    ]);

    let result = EtaSimulator::new(weekday_calendar())
        .simulate(&order)
        .unwrap();

    assert_eq!(result.eta, order.start_at);
    assert_eq!(result.remaining_hours, Decimal::ZERO);
    assert!(result.daily_capacity.is_empty());
}

#[test]
fn test_zero_capacity_calendar_is_infeasible() {
    // 班次模板每天 0h 且無加班：排程不可行，必須回報錯誤而非亂給答案
    let order = Order::new("ORD-004".to_string(), monday_start()).with_products(vec![
        Product::new("P-1".to_string(), 1).with_phases(vec![Phase::new(
            "加工".to_string(),
            Decimal::from(1),
        )]),
    ]);

    let zero_template = ShiftTemplate::five_day("停線".to_string(), Decimal::ZERO);
    let err = EtaSimulator::new(WorkCalendar::new(zero_template))
        .simulate(&order)
        .unwrap_err();

    println!("預期失敗: {err}");
    assert!(matches!(err, EtaError::SimulationLimitExceeded { .. }));
}

#[test]
fn test_pooling_and_parallel_groups_end_to_end() {
    // 場景：
    //   P-1 依序工序 16h 分攤到 EQ-A(2台) → 8h
    //   P-1 併行組1：6h 與 10h → 取 10h
    //   合計 18h：週一 8h → 週二 8h → 週三 2h → 完工週三 11:00

    let order = Order::new("ORD-005".to_string(), monday_start())
        .with_equipment(vec![Equipment::new("EQ-A".to_string(), 2)])
        .with_products(vec![Product::new("P-1".to_string(), 1).with_phases(vec![
            Phase::new("銑削".to_string(), Decimal::from(16)).with_equipment_list("EQ-A"),
            Phase::new("陽極".to_string(), Decimal::from(6))
                .with_parallel_group(ParallelGroup::Concurrent(1)),
            Phase::new("噴漆".to_string(), Decimal::from(10))
                .with_parallel_group(ParallelGroup::Concurrent(1)),
        ])]);

    let equipment_map = order.equipment_available_map();
    assert_eq!(
        WorkloadCalculator::product_remaining_hours(&order.products[0], &equipment_map),
        Decimal::from(18)
    );

    let result = EtaSimulator::new(weekday_calendar())
        .simulate(&order)
        .unwrap();
    assert_eq!(
        result.eta,
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_overtime_on_rest_day_pulls_eta_forward() {
    // 場景：44h 工作量，週六點名 2 台各加班 2h
    //   週一到週五 40h，週六 4h → 完工週六 13:00

    let mut order = Order::new("ORD-006".to_string(), monday_start())
        .with_equipment(vec![
            Equipment::new("EQ-A".to_string(), 1),
            Equipment::new("EQ-B".to_string(), 1),
        ])
        .with_products(vec![Product::new("P-1".to_string(), 1).with_phases(vec![
            Phase::new("加工".to_string(), Decimal::from(44)),
        ])]);
    order.add_adjustment(
        CapacityAdjustment::new(
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            Decimal::from(2),
            "趕交期".to_string(),
        )
        .with_equipment_ids(vec!["EQ-A".to_string(), "EQ-B".to_string()]),
    );

    let result = EtaSimulator::new(weekday_calendar())
        .simulate(&order)
        .unwrap();

    assert_eq!(
        result.eta,
        NaiveDate::from_ymd_opt(2024, 1, 6)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap()
    );
    assert!(result
        .explanation
        .iter()
        .any(|line| line.contains("設備:EQ-A,EQ-B 趕交期(+2h)")));
}

#[test]
fn test_quantity_progress_independent_of_hour_progress() {
    // 工時 100% 完成、產出 3/10：數量進度 0.3，工時進度 1.0
    let product = Product::new("P-1".to_string(), 10)
        .with_produced_qty(3)
        .with_phases(vec![Phase::new("加工".to_string(), Decimal::from(8))
            .with_completed_hours(Decimal::from(8))]);

    let equipment_map = std::collections::HashMap::new();
    assert_eq!(
        ProgressCalculator::product_quantity_progress(&product)
            .to_f64()
            .unwrap(),
        0.3
    );
    assert_eq!(
        ProgressCalculator::product_progress(&product, &equipment_map),
        Decimal::ONE
    );
}

#[test]
fn test_multi_product_workload_sums() {
    // 兩個產品各 10h 與 6h，合計 16h → 完工週二 09:00 + 8h... 16h:
    //   週一 8h → 週二剩 8h → 完工週二 17:00
    let order = Order::new("ORD-007".to_string(), monday_start()).with_products(vec![
        Product::new("P-1".to_string(), 1).with_phases(vec![Phase::new(
            "加工".to_string(),
            Decimal::from(10),
        )]),
        Product::new("P-2".to_string(), 1).with_phases(vec![Phase::new(
            "加工".to_string(),
            Decimal::from(6),
        )]),
    ]);

    let result = EtaSimulator::new(weekday_calendar())
        .simulate(&order)
        .unwrap();
    assert_eq!(result.remaining_hours, Decimal::from(16));
    assert_eq!(
        result.eta,
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap()
    );

    // 解釋說明帶工作量摘要
    assert_eq!(result.explanation[0], "Product workload summary:");
    assert_eq!(result.explanation[1], "- P-1 (PN=- qty=1): 10h");
    assert_eq!(result.explanation[2], "- P-2 (PN=- qty=1): 6h");
}
