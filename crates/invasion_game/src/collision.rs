use crate::alien::Alien;
use crate::bullet::Bullet;
use crate::geometry::Rect;

/// Removes every bullet that overlaps an alien and every alien that overlaps
/// a bullet, all in one pass. Returns the number of aliens destroyed; an
/// alien hit by several bullets is counted once.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    if bullets.is_empty() || aliens.is_empty() {
        return 0;
    }

    let mut bullet_hit = vec![false; bullets.len()];
    let mut alien_hit = vec![false; aliens.len()];
    for (bi, bullet) in bullets.iter().enumerate() {
        let rect = bullet.rect();
        for (ai, alien) in aliens.iter().enumerate() {
            if rect.intersects(&alien.rect()) {
                bullet_hit[bi] = true;
                alien_hit[ai] = true;
            }
        }
    }

    let destroyed = alien_hit.iter().filter(|&&hit| hit).count();
    retain_unmarked(bullets, &bullet_hit);
    retain_unmarked(aliens, &alien_hit);
    destroyed
}

fn retain_unmarked<T>(items: &mut Vec<T>, marked: &[bool]) {
    let mut flags = marked.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}

/// True if `rect` overlaps any alien.
pub fn any_alien_hits(rect: &Rect, aliens: &[Alien]) -> bool {
    aliens.iter().any(|alien| rect.intersects(&alien.rect()))
}
