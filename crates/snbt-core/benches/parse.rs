use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use snbt_core::{parse, parse_component, Compound};

const PLAYER: &str = r#"{seenCredits:0b,DeathTime:0s,Bukkit.updateLevel:2,foodTickTimer:0,
recipeBook:{isGuiOpen:0b,recipes:["minecraft:birch_chest_boat","minecraft:crafting_table","minecraft:oak_chest_boat"]},
Attributes:[{Name:"minecraft:generic.max_health",Base:20.0d},{Name:"minecraft:generic.movement_speed",Base:0.10000000149011612d}],
bukkit:{newTotalExp:0,keepLevel:0b,lastPlayed:1742115166782L,lastKnownName:"Tester"},
Paper.Origin:[-1.5d,96.0d,-3.5d],Rotation:[88.80469f,20.399933f],
UUID:[I;-1406999311,-101697727,-1525262829,331660734],
Inventory:[{Slot:0b,id:"minecraft:acacia_boat",tag:{asd:2},Count:1b},{Slot:1b,id:"minecraft:stone",Count:64b}],
Pos:[129.2085770903654d,81.24618693923294d,-100.51093785797983d],Health:20.0f,Fire:-20s}"#;

const COMPONENTS: &str = r#"[custom_name='"Sword"',damage=12,enchantments={levels:{sharpness:5}},unbreakable={}]"#;

pub fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_player", |b| {
        b.iter(|| black_box(parse(black_box(PLAYER)).unwrap()));
    });

    c.bench_function("parse_component", |b| {
        b.iter(|| black_box(parse_component(black_box(COMPONENTS)).unwrap()));
    });

    let player = Compound::parse(PLAYER).unwrap();
    c.bench_function("format_player", |b| {
        b.iter(|| black_box(player.to_string()));
    });

    c.bench_function("build_compound", |b| {
        b.iter(|| {
            let mut nbt = Compound::new();
            for i in 0..64 {
                nbt.set(format!("key{i}"), format!("{i}b")).unwrap();
            }
            black_box(nbt)
        });
    });
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
