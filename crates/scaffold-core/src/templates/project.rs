//! Catalog of files generated by `init`
//!
//! Each entry is a target path relative to the project root plus a Go source
//! body with `{{module_path}}` markers (and `{{project_name}}` in the config
//! template, where the project name doubles as the default database name).
//! The catalog is a build-time constant; entries are written in the order
//! they appear here.

use super::FileTemplate;

/// Files generated by `init`, in write order.
pub const PROJECT_CATALOG: &[FileTemplate] = &[
    FileTemplate {
        relative_path: "main.go",
        body: MAIN_GO,
    },
    FileTemplate {
        relative_path: "go.mod",
        body: GO_MOD,
    },
    FileTemplate {
        relative_path: "config/config.go",
        body: CONFIG_GO,
    },
    FileTemplate {
        relative_path: "services/base_service.go",
        body: BASE_SERVICE_GO,
    },
    FileTemplate {
        relative_path: "models/base_model.go",
        body: BASE_MODEL_GO,
    },
    FileTemplate {
        relative_path: "routes/routes.go",
        body: ROUTES_GO,
    },
    FileTemplate {
        relative_path: "utils/utils.go",
        body: UTILS_GO,
    },
];

const MAIN_GO: &str = r#"package main

import (
	"fmt"
	"log"

	"github.com/gin-gonic/gin"

	"{{module_path}}/config"
	"{{module_path}}/routes"
)

func main() {
	// Connect to MongoDB and build the shared application config
	cfg, err := config.New()
	if err != nil {
		log.Fatal(err)
	}
	defer cfg.Close()

	// Initialize router
	router := gin.Default()

	// Register routes
	routes.RegisterRoutes(router, cfg)

	// Start server
	port := config.GetEnv("PORT", "8080")
	fmt.Printf("Server running on port %s\n", port)
	if err := router.Run(":" + port); err != nil {
		log.Fatal(err)
	}
}
"#;

const GO_MOD: &str = r#"module {{module_path}}

go 1.20

require (
	github.com/gin-gonic/gin v1.9.1
	go.mongodb.org/mongo-driver v1.13.1
)
"#;

const CONFIG_GO: &str = r#"package config

import (
	"context"
	"os"
	"time"

	"go.mongodb.org/mongo-driver/mongo"
	"go.mongodb.org/mongo-driver/mongo/options"
)

// Config holds the resources shared by all services: the MongoDB client
// and the application database handle. It is constructed once in main and
// passed explicitly to whatever needs it.
type Config struct {
	Client   *mongo.Client
	Database *mongo.Database
}

// New connects to MongoDB and returns the application config.
func New() (*Config, error) {
	mongoURI := GetEnv("MONGO_URI", "mongodb://localhost:27017")
	dbName := GetEnv("DB_NAME", "{{project_name}}")

	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	client, err := mongo.Connect(ctx, options.Client().ApplyURI(mongoURI))
	if err != nil {
		return nil, err
	}

	// Ping the database
	if err := client.Ping(ctx, nil); err != nil {
		return nil, err
	}

	return &Config{
		Client:   client,
		Database: client.Database(dbName),
	}, nil
}

// Close disconnects the MongoDB client.
func (c *Config) Close() error {
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	return c.Client.Disconnect(ctx)
}

// GetEnv gets an environment variable or returns a default value.
func GetEnv(key, defaultValue string) string {
	if value := os.Getenv(key); value != "" {
		return value
	}
	return defaultValue
}
"#;

const BASE_SERVICE_GO: &str = r#"package services

import (
	"context"
	"time"

	"go.mongodb.org/mongo-driver/bson"
	"go.mongodb.org/mongo-driver/bson/primitive"
	"go.mongodb.org/mongo-driver/mongo"
	"go.mongodb.org/mongo-driver/mongo/options"

	"{{module_path}}/models"
)

// BaseService provides common CRUD methods over a single collection.
// The database handle is injected at construction time.
type BaseService struct {
	db         *mongo.Database
	collection string
}

// NewBaseService builds a service bound to the named collection.
func NewBaseService(db *mongo.Database, collection string) BaseService {
	return BaseService{db: db, collection: collection}
}

// Collection returns the MongoDB collection this service operates on.
func (s *BaseService) Collection() *mongo.Collection {
	return s.db.Collection(s.collection)
}

// FindAll returns all documents matching filter, with pagination.
func (s *BaseService) FindAll(page, limit int, filter interface{}, sort interface{}) ([]bson.M, int64, error) {
	collection := s.Collection()
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	if filter == nil {
		filter = bson.M{}
	}
	if sort == nil {
		sort = bson.M{"createdAt": -1}
	}

	skip := (page - 1) * limit

	findOptions := options.Find()
	findOptions.SetLimit(int64(limit))
	findOptions.SetSkip(int64(skip))
	findOptions.SetSort(sort)

	total, err := collection.CountDocuments(ctx, filter)
	if err != nil {
		return nil, 0, err
	}

	cursor, err := collection.Find(ctx, filter, findOptions)
	if err != nil {
		return nil, 0, err
	}
	defer cursor.Close(ctx)

	var results []bson.M
	if err := cursor.All(ctx, &results); err != nil {
		return nil, 0, err
	}

	return results, total, nil
}

// FindByID returns a document by its hex object ID.
func (s *BaseService) FindByID(id string) (bson.M, error) {
	collection := s.Collection()
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	objID, err := primitive.ObjectIDFromHex(id)
	if err != nil {
		return nil, err
	}

	var result bson.M
	if err := collection.FindOne(ctx, bson.M{"_id": objID}).Decode(&result); err != nil {
		return nil, err
	}

	return result, nil
}

// Create inserts a document as-is.
func (s *BaseService) Create(data interface{}) (primitive.ObjectID, error) {
	collection := s.Collection()
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	result, err := collection.InsertOne(ctx, data)
	if err != nil {
		return primitive.NilObjectID, err
	}

	return result.InsertedID.(primitive.ObjectID), nil
}

// CreateWithAudit stamps a fresh ID and audit timestamps on the model,
// then inserts it. Use this for models embedding models.BaseModel; use
// Create for anything else.
func (s *BaseService) CreateWithAudit(data models.HasBaseModel) (primitive.ObjectID, error) {
	now := time.Now()
	base := data.GetBaseModel()
	base.ID = primitive.NewObjectID()
	base.CreatedAt = now
	base.UpdatedAt = now
	data.SetBaseModel(*base)

	return s.Create(data)
}

// Update applies data to the document with the given ID and refreshes
// the updatedAt timestamp.
func (s *BaseService) Update(id string, data interface{}) error {
	collection := s.Collection()
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	objID, err := primitive.ObjectIDFromHex(id)
	if err != nil {
		return err
	}

	update := bson.M{
		"$set": bson.M{
			"updatedAt": time.Now(),
		},
	}

	if updateData, ok := data.(bson.M); ok {
		for key, value := range updateData {
			update["$set"].(bson.M)[key] = value
		}
	} else {
		update["$set"] = data
	}

	_, err = collection.UpdateOne(ctx, bson.M{"_id": objID}, update)
	return err
}

// Delete removes the document with the given ID.
func (s *BaseService) Delete(id string) error {
	collection := s.Collection()
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	objID, err := primitive.ObjectIDFromHex(id)
	if err != nil {
		return err
	}

	_, err = collection.DeleteOne(ctx, bson.M{"_id": objID})
	return err
}
"#;

const BASE_MODEL_GO: &str = r#"package models

import (
	"time"

	"go.mongodb.org/mongo-driver/bson/primitive"
)

// BaseModel contains common fields for all models.
type BaseModel struct {
	ID        primitive.ObjectID `bson:"_id,omitempty" json:"id"`
	CreatedAt time.Time          `bson:"createdAt" json:"createdAt"`
	UpdatedAt time.Time          `bson:"updatedAt" json:"updatedAt"`
}

// HasBaseModel is implemented by models that embed BaseModel, letting the
// base service stamp identifier and audit timestamps on insert.
type HasBaseModel interface {
	GetBaseModel() *BaseModel
	SetBaseModel(BaseModel)
}
"#;

const ROUTES_GO: &str = r#"package routes

import (
	"github.com/gin-gonic/gin"

	"{{module_path}}/config"
)

// RegisterRoutes registers all application routes.
func RegisterRoutes(router *gin.Engine, cfg *config.Config) {
	// API group
	api := router.Group("/api")

	// Register your module routes here
	// Example: RegisterUserRoutes(api, cfg)
	_ = api
}
"#;

const UTILS_GO: &str = r#"package utils

import (
	"encoding/json"
	"net/http"
	"strconv"

	"github.com/gin-gonic/gin"
)

// Response is the standard API response structure.
type Response struct {
	Success bool        `json:"success"`
	Message string      `json:"message"`
	Data    interface{} `json:"data"`
}

// ResponseWithPagination is the standard API response with pagination.
type ResponseWithPagination struct {
	Success    bool        `json:"success"`
	Message    string      `json:"message"`
	Data       interface{} `json:"data"`
	Total      int64       `json:"total"`
	Page       int         `json:"page"`
	Limit      int         `json:"limit"`
	TotalPages int         `json:"totalPages"`
}

// SuccessResponse returns a success response.
func SuccessResponse(c *gin.Context, message string, data interface{}) {
	c.JSON(http.StatusOK, Response{
		Success: true,
		Message: message,
		Data:    data,
	})
}

// ErrorResponse returns an error response.
func ErrorResponse(c *gin.Context, statusCode int, message string, data interface{}) {
	c.JSON(statusCode, Response{
		Success: false,
		Message: message,
		Data:    data,
	})
}

// PaginationResponse returns a paginated response.
func PaginationResponse(c *gin.Context, message string, data interface{}, total int64, page, limit int) {
	totalPages := (int(total) + limit - 1) / limit
	if totalPages < 1 {
		totalPages = 1
	}

	c.JSON(http.StatusOK, ResponseWithPagination{
		Success:    true,
		Message:    message,
		Data:       data,
		Total:      total,
		Page:       page,
		Limit:      limit,
		TotalPages: totalPages,
	})
}

// GetPaginationParams gets pagination parameters from the request.
func GetPaginationParams(c *gin.Context) (page, limit int) {
	pageStr := c.DefaultQuery("page", "1")
	limitStr := c.DefaultQuery("limit", "10")

	page, err := strconv.Atoi(pageStr)
	if err != nil || page < 1 {
		page = 1
	}

	limit, err = strconv.Atoi(limitStr)
	if err != nil || limit < 1 || limit > 100 {
		limit = 10
	}

	return page, limit
}

// StructToMap converts a struct to a map via JSON round-trip.
func StructToMap(data interface{}) (map[string]interface{}, error) {
	dataBytes, err := json.Marshal(data)
	if err != nil {
		return nil, err
	}

	mapData := make(map[string]interface{})
	if err := json.Unmarshal(dataBytes, &mapData); err != nil {
		return nil, err
	}

	return mapData, nil
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_paths_are_fixed() {
        let paths: Vec<&str> = PROJECT_CATALOG.iter().map(|t| t.relative_path).collect();
        assert_eq!(
            paths,
            vec![
                "main.go",
                "go.mod",
                "config/config.go",
                "services/base_service.go",
                "models/base_model.go",
                "routes/routes.go",
                "utils/utils.go",
            ]
        );
    }

    #[test]
    fn test_only_config_uses_project_name() {
        for t in PROJECT_CATALOG {
            let uses_name = t.body.contains("{{project_name}}");
            assert_eq!(
                uses_name,
                t.relative_path == "config/config.go",
                "unexpected project_name marker in {}",
                t.relative_path
            );
        }
    }

    #[test]
    fn test_cross_referencing_templates_use_module_path() {
        for path in ["main.go", "go.mod", "services/base_service.go", "routes/routes.go"] {
            let t = PROJECT_CATALOG
                .iter()
                .find(|t| t.relative_path == path)
                .unwrap();
            assert!(
                t.body.contains("{{module_path}}"),
                "{} should reference the module path",
                path
            );
        }
    }
}
