use super::Category;

/// иерархия категорий: группы и входящие в них категории
///
/// дерево строится из данных как есть, без проверок. проверяет его модуль validation:
/// у категории не больше одного родителя, глубина не больше двух уровней, Surrogate - лист
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTree
{
    /// подкатегории, в порядке перечисления в данных
    children: Vec<Vec<Category>>,
    /// группа, в которой категория упоминается впервые
    parents: Vec<Option<Category>>,
}

impl CategoryTree
{
    /// дерево из пар (группа, подкатегории)
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<Category>)>,
    {
        let mut children = vec![vec![]; Category::COUNT];
        let mut parents = vec![None; Category::COUNT];

        for (group, members) in groups {
            for &member in members.iter() {
                parents[member.index()].get_or_insert(group);
            }

            children[group.index()].extend(members);
        }

        Self { children, parents }
    }

    /// все категории
    pub fn all(&self) -> impl Iterator<Item = Category>
    {
        Category::ALL.into_iter()
    }

    /// категории верхнего уровня (группы и листья без группы)
    pub fn roots(&self) -> impl Iterator<Item = Category> + '_
    {
        self.all().filter(|c| self.parent(*c).is_none())
    }

    #[inline]
    pub fn parent(&self, category: Category) -> Option<Category>
    {
        self.parents[category.index()]
    }

    #[inline]
    pub fn children(&self, category: Category) -> &[Category]
    {
        &self.children[category.index()]
    }

    #[inline]
    pub fn is_leaf(&self, category: Category) -> bool
    {
        self.children(category).is_empty()
    }

    /// все связи (группа, подкатегория)
    pub(crate) fn edges(&self) -> impl Iterator<Item = (Category, Category)> + '_
    {
        self.all().flat_map(move |group| {
            self.children(group)
                .iter()
                .map(move |&child| (group, child))
        })
    }
}
