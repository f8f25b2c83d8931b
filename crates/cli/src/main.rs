//! Demo driver: builds one sample order and narrates every classification.
//!
//! This is the composition root; all business rules live in the domain
//! crates and are only invoked from here.

use anyhow::Context;

use pedidos_catalog::Product;
use pedidos_sales::{CustomerType, Order, OrderStatus, describe_item};

fn sample_order() -> anyhow::Result<Order> {
    let items = vec![
        Product::physical("Smartphone", 600.0, 0.5)?,
        Product::digital("Ebook de Rust", 50.0, "http://download.link/ebook")?,
        Product::physical("Capa de Celular", 100.0, 0.1)?,
    ];

    Ok(Order::new(
        "P1001",
        CustomerType::Premium,
        OrderStatus::Processing,
        750.0,
        items,
    ))
}

fn main() -> anyhow::Result<()> {
    pedidos_observability::init();

    println!("--- Sistema de Processamento de Pedidos ---");

    let order = sample_order().context("failed to build the sample order")?;
    tracing::info!(
        order_id = %order.order_id(),
        items = order.items().len(),
        "pedido de exemplo construído"
    );

    println!("\nAnálise de Descontos:");
    println!(
        "O pedido tem um valor de R$ {:.2} e se qualifica para: {}",
        order.total_value(),
        order.discount_tier()
    );

    println!("\nCálculo da Taxa de Envio:");
    let destination = "SP";
    let weight = order.physical_weight_kg();
    println!(
        "O pedido para {destination} com {weight} Kg tem uma taxa de envio de: R$ {:.2}",
        order.shipping_fee(destination)
    );

    println!("\nAvaliação de Bônus:");
    println!("{}", order.bonus());

    println!("\nProcessamento dos Itens:");
    for item in order.items() {
        println!("{}", describe_item(item));
    }

    println!("\nPedido (JSON):");
    let json = serde_json::to_string_pretty(&order).context("failed to serialize the order")?;
    println!("{json}");

    Ok(())
}
