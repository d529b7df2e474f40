use serde::{Deserialize, Serialize};

/// Фиксированный размер страницы для списков и выбора номера детали
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Одна страница результата. Номера страниц начинаются с 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Количество элементов до нарезки на страницы
    pub total_count: usize,
    pub page_count: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Количество страниц: `ceil(total / page_size)`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Вырезает страницу `page` (с 1) из последовательности.
///
/// Страница за пределами диапазона (включая 0) возвращается пустой,
/// счётчики при этом заполнены.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let total_count = items.len();
    let slice = if page == 0 || page_size == 0 {
        &items[0..0]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(total_count);
        let end = start.saturating_add(page_size).min(total_count);
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_count,
        page_count: page_count(total_count, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 100), 0);
        assert_eq!(page_count(1, 100), 1);
        assert_eq!(page_count(100, 100), 1);
        assert_eq!(page_count(101, 100), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_paginate_slices_in_order() {
        let items: Vec<u32> = (1..=250).collect();

        let first = paginate(&items, 100, 1);
        assert_eq!(first.items.len(), 100);
        assert_eq!(first.items[0], 1);
        assert_eq!(first.page_count, 3);

        let last = paginate(&items, 100, 3);
        assert_eq!(last.items, (201..=250).collect::<Vec<_>>());
        assert_eq!(last.total_count, 250);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = vec!["a", "b", "c"];

        let beyond = paginate(&items, 2, 5);
        assert!(beyond.is_empty());
        assert_eq!(beyond.page_count, 2);
        assert_eq!(beyond.total_count, 3);

        assert!(paginate(&items, 2, 0).is_empty());
        assert!(paginate::<u8>(&[], 100, 1).is_empty());
    }
}
