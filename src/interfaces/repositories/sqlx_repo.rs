use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSiteConfigRepo {
    pub pool: PgPool,
}

/// Helper to compute OFFSET safely from 1-based `page` and `per_page`.
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    let page = page.saturating_sub(1);
    (page as i64) * (per_page as i64)
}

#[cfg(test)]
mod tests {
    use super::page_offset;

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(page_offset(1, 9), 0);
        assert_eq!(page_offset(2, 9), 9);
        assert_eq!(page_offset(0, 9), 0);
    }
}
