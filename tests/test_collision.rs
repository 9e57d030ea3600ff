use alien_invasion::collision::*;
use alien_invasion::entities::{Alien, Bullet, Ship};
use alien_invasion::settings::Settings;

fn bullet_at(x: f32, y: f32, s: &Settings) -> Bullet {
    let mut b = Bullet::new(&Ship::new(s), s);
    b.rect.x = x;
    b.rect.y = y;
    b.y = y;
    b
}

#[test]
fn single_hit_removes_bullet_and_alien() {
    let s = Settings::default();
    let mut bullets = vec![bullet_at(120.0, 120.0, &s), bullet_at(600.0, 500.0, &s)];
    let mut aliens = vec![Alien::new(100.0, 100.0, &s), Alien::new(400.0, 100.0, &s)];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert_eq!(batch.hits_per_bullet, vec![1]);
    assert_eq!(batch.aliens_destroyed, 1);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].rect.x, 600.0);
    assert_eq!(aliens.len(), 1);
    assert_eq!(aliens[0].rect.x, 400.0);
}

#[test]
fn one_bullet_can_destroy_every_alien_it_overlaps() {
    let s = Settings::default();
    let mut bullets = vec![bullet_at(120.0, 150.0, &s)];
    let mut aliens = vec![Alien::new(100.0, 100.0, &s), Alien::new(110.0, 140.0, &s)];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert_eq!(batch.hits_per_bullet, vec![2]);
    assert_eq!(batch.points(50), 100);
    assert!(bullets.is_empty());
    assert!(aliens.is_empty());
}

#[test]
fn simultaneous_hits_resolve_in_one_pass() {
    let s = Settings::default();
    let mut bullets = vec![
        bullet_at(120.0, 120.0, &s),
        bullet_at(420.0, 120.0, &s),
        bullet_at(720.0, 120.0, &s),
    ];
    let mut aliens = vec![
        Alien::new(100.0, 100.0, &s),
        Alien::new(400.0, 100.0, &s),
        Alien::new(700.0, 100.0, &s),
        Alien::new(1000.0, 100.0, &s),
    ];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert_eq!(batch.aliens_destroyed, 3);
    assert_eq!(batch.points(75), 225);
    assert!(bullets.is_empty());
    assert_eq!(aliens.len(), 1);
}

#[test]
fn alien_shared_by_two_bullets_scores_once() {
    let s = Settings::default();
    let mut bullets = vec![bullet_at(110.0, 120.0, &s), bullet_at(140.0, 120.0, &s)];
    let mut aliens = vec![Alien::new(100.0, 100.0, &s)];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert_eq!(batch.hits_per_bullet, vec![1]);
    assert_eq!(batch.aliens_destroyed, 1);
    assert_eq!(batch.points(50), 50);
    assert!(aliens.is_empty());
    // The second bullet found nothing left to hit
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].rect.x, 140.0);
}

#[test]
fn bullet_overlapping_only_destroyed_aliens_survives() {
    let s = Settings::default();
    // First bullet overlaps both aliens, second overlaps only the first
    let mut bullets = vec![bullet_at(120.0, 150.0, &s), bullet_at(130.0, 105.0, &s)];
    let mut aliens = vec![Alien::new(100.0, 100.0, &s), Alien::new(110.0, 140.0, &s)];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert_eq!(batch.hits_per_bullet, vec![2]);
    assert_eq!(batch.points(50), 100);
    assert_eq!(bullets.len(), 1);
}

#[test]
fn points_saturate_instead_of_overflowing() {
    let s = Settings::default();
    let mut bullets = vec![bullet_at(120.0, 120.0, &s), bullet_at(420.0, 120.0, &s)];
    let mut aliens = vec![Alien::new(100.0, 100.0, &s), Alien::new(400.0, 100.0, &s)];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert_eq!(batch.aliens_destroyed, 2);
    assert_eq!(batch.points(u32::MAX / 2 + 1), u32::MAX);
}

#[test]
fn misses_leave_everything_in_place() {
    let s = Settings::default();
    let mut bullets = vec![bullet_at(600.0, 500.0, &s)];
    let mut aliens = vec![Alien::new(100.0, 100.0, &s)];

    let batch = resolve_bullet_alien_collisions(&mut bullets, &mut aliens);
    assert!(batch.is_empty());
    assert_eq!(batch.points(50), 0);
    assert_eq!(bullets.len(), 1);
    assert_eq!(aliens.len(), 1);
}

#[test]
fn ship_collision() {
    let s = Settings::default();
    let ship = Ship::new(&s);
    let far = vec![Alien::new(100.0, 100.0, &s)];
    assert!(!ship_collides(&ship, &far));

    let near = vec![Alien::new(ship.rect.x, ship.rect.y - 20.0, &s)];
    assert!(ship_collides(&ship, &near));
}
