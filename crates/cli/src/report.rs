//! Plain-text catalog report.

use std::fmt::Write;

use catalog_products::{Category, CounterSnapshot};

/// Render every category with its products and average price, then the counters.
pub fn render(categories: &[Category], counters: CounterSnapshot) -> String {
    let mut out = String::new();
    for category in categories {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{category}");
        if !category.is_empty() {
            let _ = writeln!(out, "{}", category.products_text());
        }
        let _ = writeln!(out, "Средняя цена: {:.2} руб.", category.average_price());
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Всего категорий: {}, всего товаров: {}",
        counters.categories, counters.products
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::Product;

    #[test]
    fn report_lists_categories_products_and_counters() {
        let category = Category::new(
            "Телевизоры",
            "Экраны",
            vec![Product::new("55\" QLED 4K", "Фоновая подсветка", 123000.0, 7).unwrap()],
        )
        .unwrap();

        let text = render(
            &[category],
            CounterSnapshot {
                categories: 1,
                products: 1,
            },
        );

        assert_eq!(
            text,
            "Телевизоры, количество продуктов: 7 шт.\n\
             55\" QLED 4K, 123000.0 руб. Остаток: 7 шт.\n\
             Средняя цена: 123000.00 руб.\n\
             \n\
             Всего категорий: 1, всего товаров: 1\n"
        );
    }

    #[test]
    fn empty_category_has_no_product_lines() {
        let text = render(&[Category::empty("Пусто", "")], CounterSnapshot::default());
        assert!(text.starts_with("Пусто, количество продуктов: 0 шт.\nСредняя цена: 0.00 руб.\n"));
    }
}
